use tracing::info;

pub const TEST_MESSAGE: &str = "Hello from Azure Functions! This is a simple test endpoint.";

pub async fn test_message() -> &'static str {
    info!("Test endpoint requested");
    TEST_MESSAGE
}
