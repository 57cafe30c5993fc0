//! Command-line split into optimizer flags and target file
//!
//! Only the final argument names the file. Everything before it belongs to
//! optipng and is forwarded untouched, in order. Arguments stay `OsString`
//! so file names that are not valid UTF-8 survive the round trip.

use crate::error::WrapperError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A single wrapper invocation: `[flags...] <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub flags: Vec<OsString>,
    pub target: PathBuf,
}

impl Invocation {
    /// Split raw arguments (program name already removed).
    pub fn from_args<I, S>(args: I) -> Result<Self, WrapperError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut flags: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let target = flags.pop().ok_or(WrapperError::Usage)?;

        Ok(Self {
            flags,
            target: PathBuf::from(target),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Arguments handed to the optimizer: the flags, then the target.
    pub fn optimizer_args(&self) -> impl Iterator<Item = &OsStr> {
        self.flags
            .iter()
            .map(OsString::as_os_str)
            .chain(std::iter::once(self.target.as_os_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(inv: &Invocation) -> Vec<&OsStr> {
        inv.optimizer_args().collect()
    }

    #[test]
    fn test_empty_args_is_usage_error() {
        let result = Invocation::from_args(Vec::<String>::new());
        assert!(matches!(result, Err(WrapperError::Usage)));
    }

    #[test]
    fn test_single_arg_is_target() {
        let inv = Invocation::from_args(["photo.png"]).unwrap();
        assert!(inv.flags.is_empty());
        assert_eq!(inv.target(), Path::new("photo.png"));
    }

    #[test]
    fn test_flags_keep_order() {
        let inv = Invocation::from_args(["-strip", "all", "-o7", "photo.png"]).unwrap();
        assert_eq!(inv.flags, vec!["-strip", "all", "-o7"]);
        assert_eq!(inv.target(), Path::new("photo.png"));
        assert_eq!(collected(&inv), vec!["-strip", "all", "-o7", "photo.png"]);
    }

    #[test]
    fn test_separator_is_an_ordinary_flag() {
        let inv = Invocation::from_args(["--", "photo.png"]).unwrap();
        assert_eq!(inv.flags, vec!["--"]);
        assert_eq!(collected(&inv), vec!["--", "photo.png"]);
    }

    #[test]
    fn test_last_arg_wins_even_if_flag_like() {
        let inv = Invocation::from_args(["photo.png", "-o7"]).unwrap();
        assert_eq!(inv.flags, vec!["photo.png"]);
        assert_eq!(inv.target(), Path::new("-o7"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_target_is_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"ph\xffoto.png");
        let inv = Invocation::from_args([OsStr::new("-o2"), name]).unwrap();
        assert_eq!(inv.target().as_os_str(), name);
        assert_eq!(collected(&inv), vec![OsStr::new("-o2"), name]);
    }
}
