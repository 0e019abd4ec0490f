pub async fn root() -> &'static str {
    "brandrag server is running."
}

pub async fn health_check() -> &'static str {
    "OK"
}
