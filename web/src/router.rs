//! Builds the live axum router from the route table.

use crate::controller::{
    calculator_controller, checkout_controller, guide_controller, home_controller,
    landing_controller, page_controller,
};
use crate::routes::{self, NamedHandler, RouteTarget, ROUTES};
use crate::AppState;
use axum::extract::State;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;

/// Turns the route table into the router the server runs: one exact
/// route per table entry, static assets under /static, and the 404
/// fallback for everything else.
pub fn define_routes(app_state: AppState) -> Router {
    routes::report_duplicate_names();

    let mut router = Router::new();
    for route in ROUTES {
        router = router.route(route.path, method_router(route.target));
    }

    router
        .nest_service("/static", ServeDir::new(app_state.config.static_dir()))
        .fallback(page_controller::not_found)
        .with_state(app_state)
}

/// Maps a route target to the method router its controller supports.
/// Template routes are GET-only; named handlers take the methods their
/// controllers accept.
fn method_router(target: RouteTarget) -> MethodRouter<AppState> {
    match target {
        RouteTarget::Template(template) => {
            get(move |State(app_state): State<AppState>| async move {
                page_controller::render(&app_state, template)
            })
        }
        RouteTarget::Handler(handler) => match handler {
            NamedHandler::Home => get(home_controller::home),
            NamedHandler::Calculator => get(calculator_controller::show),
            NamedHandler::Guide => {
                get(guide_controller::show).post(guide_controller::request_guide)
            }
            NamedHandler::CreateCheckoutSession => {
                post(checkout_controller::create_checkout_session)
            }
            NamedHandler::Cancel => get(checkout_controller::cancel),
            NamedHandler::Success => get(checkout_controller::success),
            NamedHandler::TrialSignup => {
                get(landing_controller::bidstats).post(landing_controller::bidstats_signup)
            }
            NamedHandler::TrialSignupOxygenFinance => get(landing_controller::oxygen_finance)
                .post(landing_controller::oxygen_finance_signup),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use clap::Parser;
    use http_body_util::BodyExt;
    use mockito::{Matcher, Server};
    use service::config::Config;
    use service::templates::TemplateStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_config(args: &[&str]) -> Config {
        let mut full = vec!["mytenderweb"];
        full.extend_from_slice(args);
        Config::parse_from(full)
    }

    /// Template the named handlers render, keyed off the handler variant.
    fn handler_template(handler: NamedHandler) -> &'static str {
        match handler {
            NamedHandler::Home => "index.html",
            NamedHandler::Calculator => "calculator.html",
            NamedHandler::Guide => "guide.html",
            NamedHandler::CreateCheckoutSession => "",
            NamedHandler::Cancel => "cancel.html",
            NamedHandler::Success => "success.html",
            NamedHandler::TrialSignup => "bidstats.html",
            NamedHandler::TrialSignupOxygenFinance => "oxygen_finance.html",
        }
    }

    fn full_template_store() -> TemplateStore {
        let mut entries: Vec<(String, String)> = ROUTES
            .iter()
            .filter_map(|route| match route.target {
                RouteTarget::Template(name) => Some(name),
                RouteTarget::Handler(handler) => {
                    Some(handler_template(handler)).filter(|name| !name.is_empty())
                }
            })
            .map(|name| (name.to_string(), format!("<h1>{name}</h1>")))
            .collect();
        entries.push(("404.html".to_string(), "<h1>404.html</h1>".to_string()));
        TemplateStore::from_entries(entries)
    }

    fn test_router(config: Config) -> Router {
        let templates = Arc::new(full_template_store());
        define_routes(AppState::new(config, &templates))
    }

    async fn get_response(router: Router, path: &str) -> axum::response::Response {
        router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(router: Router, path: &str, body: &str) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_every_route_dispatches_to_its_documented_target() {
        for route in ROUTES {
            let response = get_response(test_router(test_config(&[])), route.path).await;

            match route.target {
                RouteTarget::Template(template) => {
                    assert_eq!(response.status(), StatusCode::OK, "GET {}", route.path);
                    assert_eq!(
                        body_string(response).await,
                        format!("<h1>{template}</h1>"),
                        "GET {} rendered the wrong template",
                        route.path
                    );
                }
                RouteTarget::Handler(NamedHandler::CreateCheckoutSession) => {
                    // POST-only route
                    assert_eq!(
                        response.status(),
                        StatusCode::METHOD_NOT_ALLOWED,
                        "GET {}",
                        route.path
                    );
                }
                RouteTarget::Handler(handler) => {
                    assert_eq!(response.status(), StatusCode::OK, "GET {}", route.path);
                    assert_eq!(
                        body_string(response).await,
                        format!("<h1>{}</h1>", handler_template(handler)),
                        "GET {} rendered the wrong page",
                        route.path
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_the_404_page() {
        let response = get_response(test_router(test_config(&[])), "/no-such-page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "<h1>404.html</h1>");
    }

    #[tokio::test]
    async fn test_unknown_path_without_a_404_template_is_plain_not_found() {
        let templates = Arc::new(TemplateStore::from_entries([("index.html", "<h1>home</h1>")]));
        let router = define_routes(AppState::new(test_config(&[]), &templates));

        let response = get_response(router, "/no-such-page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "NOT FOUND");
    }

    #[tokio::test]
    async fn test_paths_match_exactly_with_their_trailing_slash() {
        let response = get_response(test_router(test_config(&[])), "/calculator").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get_response(test_router(test_config(&[])), "/about/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_routed_template_missing_from_the_store_is_a_server_error() {
        let templates = Arc::new(TemplateStore::from_entries([("404.html", "missing")]));
        let router = define_routes(AppState::new(test_config(&[]), &templates));

        let response = get_response(router, "/about").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_calculator_renders_the_visitors_savings_estimate() {
        let templates = Arc::new(TemplateStore::from_entries([(
            "calculator.html",
            "{{hours_saved}} hours, £{{cost_saved}}",
        )]));
        let router = define_routes(AppState::new(test_config(&[]), &templates));

        let response = get_response(
            router,
            "/calculator/?bids_per_month=4&hours_per_bid=30&hourly_rate=45",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "72 hours, £3240.00");
    }

    #[tokio::test]
    async fn test_guide_request_with_invalid_email_is_unprocessable() {
        let response = post_form(
            test_router(test_config(&[])),
            "/guide/",
            "email=not-an-address",
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_guide_request_emails_the_guide_and_redirects_to_thankyou() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/email")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "to": [{"email": "prospect@example.com"}],
            })))
            .with_status(202)
            .create_async()
            .await;

        let config = test_config(&[
            "--mailer-base-url",
            &server.url(),
            "--mailer-api-key",
            "test_api_key_123",
        ]);
        let response = post_form(
            test_router(config),
            "/guide/",
            "email=prospect%40example.com&name=Jo",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/thankyou"
        );
    }

    #[tokio::test]
    async fn test_checkout_redirects_to_the_hosted_payment_page() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/checkout/sessions")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "line_items[0][price]".to_string(),
                    "price_std".to_string(),
                ),
                Matcher::UrlEncoded(
                    "success_url".to_string(),
                    "https://mytender.io/success/?session_id={CHECKOUT_SESSION_ID}".to_string(),
                ),
                Matcher::UrlEncoded(
                    "cancel_url".to_string(),
                    "https://mytender.io/cancel/".to_string(),
                ),
            ]))
            .with_status(200)
            .with_body(r#"{"id":"cs_1","url":"https://checkout.stripe.com/c/pay/cs_1"}"#)
            .create_async()
            .await;

        let config = test_config(&[
            "--site-base-url",
            "https://mytender.io",
            "--payment-api-base-url",
            &server.url(),
            "--payment-secret-key",
            "sk_test_123",
            "--standard-plan-price-id",
            "price_std",
        ]);
        let response = post_form(
            test_router(config),
            "/create-checkout-session/",
            "plan=standard",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://checkout.stripe.com/c/pay/cs_1"
        );
    }

    #[tokio::test]
    async fn test_checkout_maps_payment_api_failure_to_bad_gateway() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/checkout/sessions")
            .with_status(500)
            .with_body(r#"{"error":{"message":"internal"}}"#)
            .create_async()
            .await;

        let config = test_config(&[
            "--payment-api-base-url",
            &server.url(),
            "--payment-secret-key",
            "sk_test_123",
            "--standard-plan-price-id",
            "price_std",
        ]);
        let response = post_form(
            test_router(config),
            "/create-checkout-session/",
            "plan=standard",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_checkout_with_an_unknown_plan_is_unprocessable() {
        let response = post_form(
            test_router(test_config(&[])),
            "/create-checkout-session/",
            "plan=enterprise",
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_trial_signup_notifies_sales_and_redirects_to_thankyou() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/email")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({
                    "subject": "New trial signup (oxygen-finance)",
                })),
                Matcher::Regex("Campaign: oxygen-finance".to_string()),
            ]))
            .with_status(202)
            .create_async()
            .await;

        let config = test_config(&[
            "--mailer-base-url",
            &server.url(),
            "--mailer-api-key",
            "test_api_key_123",
        ]);
        let response = post_form(
            test_router(config),
            "/oxygen-finance",
            "email=prospect%40example.com&company=Acme",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/thankyou"
        );
    }

    #[tokio::test]
    async fn test_success_page_renders_even_when_session_lookup_fails() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/checkout/sessions/cs_gone")
            .with_status(404)
            .with_body(r#"{"error":{"message":"No such checkout session"}}"#)
            .create_async()
            .await;

        let config = test_config(&[
            "--payment-api-base-url",
            &server.url(),
            "--payment-secret-key",
            "sk_test_123",
        ]);
        let response = get_response(test_router(config), "/success/?session_id=cs_gone").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<h1>success.html</h1>");
    }

    #[tokio::test]
    async fn test_home_accepts_utm_attribution_parameters() {
        let response = get_response(
            test_router(test_config(&[])),
            "/?utm_source=linkedin&utm_campaign=q3",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<h1>index.html</h1>");
    }
}
