use cocoa::base::{id, nil};
use cocoa::foundation::NSInteger;
use objc::{class, msg_send, sel, sel_impl};

/// `NSPasteboard.generalPasteboard.changeCount`.
pub fn change_count() -> Option<u64> {
    unsafe {
        let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
        if pasteboard == nil {
            return None;
        }
        let count: NSInteger = msg_send![pasteboard, changeCount];
        u64::try_from(count).ok()
    }
}
