use std::os::unix::prelude::MetadataExt;

/// MTime info gathered for a file.  This also models "file is absent".
/// It's not using an Option<> just because it makes the code using it easier
/// to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MTime {
    Missing,
    Stamp(i64),
}

impl MTime {
    /// The mtime in whole seconds, with absence mapped below any stamp a
    /// build action can produce.  Watermark arithmetic in the refresh
    /// engine works on these plain integers.
    pub fn units(self) -> i64 {
        match self {
            MTime::Missing => 0,
            MTime::Stamp(t) => t,
        }
    }
}

/// stat() an on-disk path, producing its MTime.
pub fn stat(path: &str) -> std::io::Result<MTime> {
    Ok(match std::fs::metadata(path) {
        Ok(meta) => MTime::Stamp(meta.mtime()),
        Err(err) => {
            if err.kind() == std::io::ErrorKind::NotFound {
                MTime::Missing
            } else {
                return Err(err);
            }
        }
    })
}
