use async_trait::async_trait;

use super::clipboard::ChangeToken;

/// Who produced a clipboard change observed by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Written by the paste pipeline; must not be ingested.
    LocalWrite,
    /// Written by another application.
    External,
    /// A local write has started but its token is not known yet.
    WriteInFlight,
}

/// Coordinates clipboard writes by the paste pipeline with the poller.
///
/// 粘贴流程写入剪贴板前后标记变更来源，轮询器据此忽略自身写入。
///
/// # Behavior / 行为
/// - `begin_local_write()` is called before writing, `finish_local_write()`
///   right after with the resulting token (or `None` when the write failed).
/// - `classify()` consumes the recorded local token when it matches.
#[async_trait]
pub trait ClipboardChangeOriginPort: Send + Sync {
    async fn begin_local_write(&self);

    async fn finish_local_write(&self, token: Option<ChangeToken>);

    async fn classify(&self, observed: ChangeToken) -> ChangeOrigin;
}
