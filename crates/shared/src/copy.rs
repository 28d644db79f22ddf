//! User-facing text shown by the page controllers.

pub const SENDING: &str = "发送中...";
pub const SUBMIT_SUCCEEDED: &str = "发送成功，我们会尽快联系您！";
pub const SUBMIT_FAILED: &str = "发送失败，请稍后重试";
pub const GATE_REJECTED: &str = "不是自己人，再见！";
