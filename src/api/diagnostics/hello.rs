pub(crate) const GREETING: &str = "Hello from the backend! The connection works.";

/// Smoke test for the frontend connection.
#[get("/hello")]
pub(crate) fn hello() -> &'static str {
    GREETING
}
