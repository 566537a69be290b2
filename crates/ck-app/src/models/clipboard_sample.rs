/// One observation of the system clipboard taken by the poller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSample {
    pub text: Option<String>,
    pub image: Option<Vec<u8>>,
    /// Name of the foreground application when the change was seen.
    pub source_app: Option<String>,
}
