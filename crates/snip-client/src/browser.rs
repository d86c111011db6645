//! Opening short URLs in the user's browser

use std::process::Command;

use snip_core::prelude::*;

/// Open `url` with `browser`, or the platform opener when `browser` is empty
///
/// Fire-and-forget: the child process is not awaited.
pub fn open_url(url: &str, browser: &str) -> Result<()> {
    info!("Opening {} in browser", url);
    spawn_opener(url, browser).map_err(|e| Error::browser(e.to_string()))
}

fn spawn_opener(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_custom_browser_is_browser_error() {
        let err = open_url(
            "http://localhost:8080/abc123",
            "/definitely/not/a/browser-binary",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Browser { .. }));
    }
}
