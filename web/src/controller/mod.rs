pub(crate) mod calculator_controller;
pub(crate) mod checkout_controller;
pub(crate) mod guide_controller;
pub(crate) mod home_controller;
pub(crate) mod landing_controller;
pub(crate) mod page_controller;
