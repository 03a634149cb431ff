use tower_http::trace::TraceLayer;

/// Request/response logging for every content, tour and blog endpoint.
pub fn trace_layer(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}
