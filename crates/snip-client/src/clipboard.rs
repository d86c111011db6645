//! System clipboard access through the platform's clipboard tool
//!
//! The text is piped to the first available tool's stdin. Failing to find
//! or run a tool is a [`Error::Clipboard`]; callers log it and skip the
//! copy confirmation.

use std::path::PathBuf;
use std::process::Stdio;

use snip_core::prelude::*;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A clipboard command line: program name plus arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const PBCOPY: ClipboardTool = ClipboardTool {
    program: "pbcopy",
    args: &[],
};
const WL_COPY: ClipboardTool = ClipboardTool {
    program: "wl-copy",
    args: &[],
};
const XCLIP: ClipboardTool = ClipboardTool {
    program: "xclip",
    args: &["-selection", "clipboard"],
};
const XSEL: ClipboardTool = ClipboardTool {
    program: "xsel",
    args: &["--clipboard", "--input"],
};
const CLIP: ClipboardTool = ClipboardTool {
    program: "clip",
    args: &[],
};

/// Candidate tools for a platform, in preference order
pub fn candidates(os: &str, wayland: bool) -> Vec<ClipboardTool> {
    match os {
        "macos" => vec![PBCOPY],
        "windows" => vec![CLIP],
        _ if wayland => vec![WL_COPY, XCLIP, XSEL],
        _ => vec![XCLIP, XSEL, WL_COPY],
    }
}

/// Find the first candidate tool present in PATH
pub fn detect_tool() -> Option<(ClipboardTool, PathBuf)> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    candidates(std::env::consts::OS, wayland)
        .into_iter()
        .find_map(|tool| which::which(tool.program).ok().map(|path| (tool, path)))
}

/// Copy `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
    let (tool, path) = detect_tool().ok_or_else(|| {
        Error::clipboard("no clipboard tool found (install wl-copy, xclip or xsel)")
    })?;
    debug!("Copying {} bytes with {}", text.len(), tool.program);

    let mut child = Command::new(&path)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::clipboard(format!("failed to run {}: {}", tool.program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| Error::clipboard(format!("failed to write to {}: {}", tool.program, e)))?;
        // Dropping stdin closes the pipe so the tool sees EOF
    }

    let status = child
        .wait()
        .await
        .map_err(|e| Error::clipboard(format!("{} did not finish: {}", tool.program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::clipboard(format!(
            "{} exited with {}",
            tool.program, status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_uses_pbcopy() {
        assert_eq!(candidates("macos", false), vec![PBCOPY]);
    }

    #[test]
    fn test_windows_uses_clip() {
        assert_eq!(candidates("windows", false), vec![CLIP]);
    }

    #[test]
    fn test_wayland_prefers_wl_copy() {
        let tools = candidates("linux", true);
        assert_eq!(tools.first(), Some(&WL_COPY));
        assert_eq!(tools.len(), 3);
    }

    #[test]
    fn test_x11_prefers_xclip() {
        let tools = candidates("linux", false);
        assert_eq!(tools.first(), Some(&XCLIP));
        assert!(tools.contains(&XSEL));
    }

    #[test]
    fn test_xclip_targets_clipboard_selection() {
        assert_eq!(XCLIP.args, &["-selection", "clipboard"]);
    }
}
