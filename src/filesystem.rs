// ============================================================================
// File: src/filesystem.rs
// ----------------------------------------------------------------------------
// File system registry for diskutil erase operations.
//
// Maps each supported file system to the raw identifier string understood by
// `diskutil erasedisk` and a user-facing display name. macOS lists the full
// set with `diskutil listFilesystems`.
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiskError, Result};

/// File systems accepted by `diskutil` when erasing a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSystem {
    /// APFS
    Apfs,
    /// Case-sensitive APFS
    CaseSensitiveApfs,
    /// ExFAT
    ExFat,
    /// Erase without writing a new file system
    FreeSpace,
    /// MS-DOS (FAT), size-appropriate variant chosen by the tool
    MsDos,
    /// MS-DOS FAT12
    Fat12,
    /// MS-DOS FAT16
    Fat16,
    /// MS-DOS FAT32
    Fat32,
    /// Mac OS Extended
    HfsPlus,
    /// Mac OS Extended, case-sensitive
    CaseSensitiveHfsPlus,
    /// Mac OS Extended, case-sensitive and journaled
    CaseSensitiveJournaledHfsPlus,
    /// Mac OS Extended, journaled
    JournaledHfsPlus,
}

impl FileSystem {
    /// Every registered file system, in registry order.
    pub const ALL: [FileSystem; 12] = [
        FileSystem::Apfs,
        FileSystem::CaseSensitiveApfs,
        FileSystem::ExFat,
        FileSystem::FreeSpace,
        FileSystem::MsDos,
        FileSystem::Fat12,
        FileSystem::Fat16,
        FileSystem::Fat32,
        FileSystem::HfsPlus,
        FileSystem::CaseSensitiveHfsPlus,
        FileSystem::CaseSensitiveJournaledHfsPlus,
        FileSystem::JournaledHfsPlus,
    ];

    /// Raw identifier passed verbatim to `diskutil erasedisk`.
    pub fn identifier(self) -> &'static str {
        match self {
            FileSystem::Apfs => "APFS",
            FileSystem::CaseSensitiveApfs => "Case-sensitive APFS",
            FileSystem::ExFat => "ExFAT",
            FileSystem::FreeSpace => "Free Space",
            FileSystem::MsDos => "MS-DOS",
            FileSystem::Fat12 => "MS-DOS FAT12",
            FileSystem::Fat16 => "MS-DOS FAT16",
            FileSystem::Fat32 => "MS-DOS FAT32",
            FileSystem::HfsPlus => "HFS+",
            FileSystem::CaseSensitiveHfsPlus => "Case-sensitive HFS+",
            FileSystem::CaseSensitiveJournaledHfsPlus => "Case-sensitive Journaled HFS+",
            FileSystem::JournaledHfsPlus => "Journaled HFS+",
        }
    }

    /// User-facing name of the file system.
    pub fn display_name(self) -> &'static str {
        match self {
            FileSystem::Apfs => "APFS",
            FileSystem::CaseSensitiveApfs => "APFS (Case-sensitive)",
            FileSystem::ExFat => "ExFAT",
            FileSystem::FreeSpace => "Free Space",
            FileSystem::MsDos => "MS-DOS (FAT)",
            FileSystem::Fat12 => "MS-DOS (FAT12)",
            FileSystem::Fat16 => "MS-DOS (FAT16)",
            FileSystem::Fat32 => "MS-DOS (FAT32)",
            FileSystem::HfsPlus => "Mac OS Extended",
            FileSystem::CaseSensitiveHfsPlus => "Mac OS Extended (Case-sensitive)",
            FileSystem::CaseSensitiveJournaledHfsPlus => {
                "Mac OS Extended (Case-sensitive, Journaled)"
            }
            FileSystem::JournaledHfsPlus => "Mac OS Extended (Journaled)",
        }
    }

    /// Look up a file system by its raw identifier.
    ///
    /// The match is exact: identifiers are positional `diskutil` arguments
    /// and case matters.
    pub fn from_identifier(identifier: &str) -> Result<FileSystem> {
        FileSystem::ALL
            .into_iter()
            .find(|fs| fs.identifier() == identifier)
            .ok_or_else(|| DiskError::UnknownFileSystem {
                identifier: identifier.to_string(),
            })
    }
}

impl fmt::Display for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FileSystem {
    type Err = DiskError;

    fn from_str(s: &str) -> Result<Self> {
        FileSystem::from_identifier(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_are_distinct() {
        let identifiers: HashSet<&str> =
            FileSystem::ALL.iter().map(|fs| fs.identifier()).collect();
        assert_eq!(identifiers.len(), FileSystem::ALL.len());
    }

    #[test]
    fn identifier_lookup_round_trips() {
        for fs in FileSystem::ALL {
            let looked_up = FileSystem::from_identifier(fs.identifier())
                .expect("every registered identifier should resolve");
            assert_eq!(looked_up, fs);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let result = FileSystem::from_identifier("BeFS");
        assert!(matches!(result, Err(DiskError::UnknownFileSystem { .. })));
    }

    #[test]
    fn identifier_match_is_case_sensitive() {
        assert!(FileSystem::from_identifier("apfs").is_err());
        assert_eq!(
            FileSystem::from_identifier("APFS").expect("exact match should resolve"),
            FileSystem::Apfs
        );
    }

    #[test]
    fn display_uses_the_user_facing_name() {
        assert_eq!(
            FileSystem::CaseSensitiveApfs.to_string(),
            "APFS (Case-sensitive)"
        );
        assert_eq!(
            FileSystem::JournaledHfsPlus.to_string(),
            "Mac OS Extended (Journaled)"
        );
    }

    #[test]
    fn from_str_uses_the_raw_identifier() {
        let fs: FileSystem = "Journaled HFS+".parse().expect("identifier should parse");
        assert_eq!(fs, FileSystem::JournaledHfsPlus);
    }
}
