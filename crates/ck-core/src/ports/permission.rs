use async_trait::async_trait;

/// Permission to inject input into other applications
/// (macOS: Accessibility trust).
#[async_trait]
pub trait InjectionPermissionPort: Send + Sync {
    async fn is_granted(&self) -> bool;

    /// Ask the user to grant the permission. Returns without waiting for an answer.
    async fn request(&self);
}
