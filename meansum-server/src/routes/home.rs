/// GET / - Report that the service is running
pub async fn home() -> &'static str {
    "API is running"
}
