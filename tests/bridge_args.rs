use std::cell::RefCell;

use dialog_bridge::{DialogBridge, DialogProvider};

/// Records the arguments it receives, NUL-scanned the way the native side
/// would read them, then cancels. `None` marks a null pointer.
#[derive(Default)]
struct RecordingProvider {
    seen: RefCell<Vec<Option<Vec<u16>>>>,
}

impl RecordingProvider {
    fn record(&self, ptr: *const u16) {
        let units = if ptr.is_null() {
            None
        } else {
            let mut v = Vec::new();
            let mut i = 0;
            loop {
                let u = unsafe { ptr.add(i).read() };
                if u == 0 {
                    break;
                }
                v.push(u);
                i += 1;
            }
            Some(v)
        };
        self.seen.borrow_mut().push(units);
    }
}

unsafe impl DialogProvider for RecordingProvider {
    unsafe fn open_file(&self, initial_dir: *const u16) -> *const u16 {
        self.record(initial_dir);
        std::ptr::null()
    }

    unsafe fn open_file_filtered(&self, filter: *const u16, initial_dir: *const u16)
        -> *const u16 {
        self.record(filter);
        self.record(initial_dir);
        std::ptr::null()
    }

    unsafe fn open_folder(&self, initial_dir: *const u16) -> *const u16 {
        self.record(initial_dir);
        std::ptr::null()
    }
}

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn absent_initial_dir_arrives_as_null() {
    let provider = RecordingProvider::default();
    let bridge = DialogBridge::new(&provider);

    bridge.open_file(None).unwrap();
    bridge.open_folder(None).unwrap();

    assert_eq!(*provider.seen.borrow(), vec![None, None]);
}

#[test]
fn initial_dir_arrives_utf16_terminated() {
    let provider = RecordingProvider::default();
    let bridge = DialogBridge::new(&provider);

    bridge.open_file(Some("C:\\Users\\Ünïcode")).unwrap();

    assert_eq!(
        *provider.seen.borrow(),
        vec![Some(units("C:\\Users\\Ünïcode"))]
    );
}

#[test]
fn empty_filter_is_forwarded_unmodified() {
    let provider = RecordingProvider::default();
    let bridge = DialogBridge::new(&provider);

    bridge.open_file_filtered("", None).unwrap();

    // an empty filter is a valid empty wide string, not a null pointer
    assert_eq!(*provider.seen.borrow(), vec![Some(Vec::new()), None]);
}

#[test]
fn filter_and_dir_arrive_in_order() {
    let provider = RecordingProvider::default();
    let bridge = DialogBridge::new(&provider);

    bridge.open_file_filtered("Text", Some("D:\\docs")).unwrap();

    assert_eq!(
        *provider.seen.borrow(),
        vec![Some(units("Text")), Some(units("D:\\docs"))]
    );
}
