use dialog_bridge::{filter, logging, DialogBridge};

/// Command line driver for poking the native dialogs by hand:
/// `dialog_bridge [file|filter|folder] [INITIAL_DIR]`.
fn main() -> anyhow::Result<()> {
    logging::init(std::env::var_os("DIALOG_BRIDGE_DEBUG").is_some());

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "file".into());
    let initial_dir = args
        .next()
        .or_else(|| dirs_next::home_dir().map(|p| p.to_string_lossy().into_owned()));

    let bridge = DialogBridge::native()?;
    let selection = match mode.as_str() {
        "file" => bridge.open_file(initial_dir.as_deref())?,
        "filter" => {
            let filter = filter::build_filter(&[("All", "*.*"), ("Text", "*.txt")]);
            bridge.open_file_filtered(&filter, initial_dir.as_deref())?
        }
        "folder" => bridge.open_folder(initial_dir.as_deref())?,
        other => anyhow::bail!("unknown mode `{other}`, expected file, filter or folder"),
    };

    match selection {
        Some(path) => println!("{path}"),
        None => tracing::info!("no selection"),
    }
    Ok(())
}
