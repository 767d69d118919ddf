// ============================================================================
// File: src/ramdisk.rs
// ----------------------------------------------------------------------------
// RAM disk operations for macOS.
//
// Creates memory-backed block devices with `hdid`, formats and ejects them
// with `diskutil`. Each operation is one external process invocation whose
// captured output is returned without interpretation; the RamDisk handle
// layers the create -> erase -> eject lifecycle on top and is the only
// place tool output is judged.
// ============================================================================

use log::info;
use serde::{Deserialize, Serialize};

use crate::command::{self, CommandResult};
use crate::error::{DiskError, Result};
use crate::filesystem::FileSystem;

/// Path of the disk image attach tool.
pub const HDID: &str = "/usr/bin/hdid";

/// Path of the disk management tool.
pub const DISKUTIL: &str = "/usr/sbin/diskutil";

// hdid sizes ram:// regions in 512-byte sectors.
const SECTORS_PER_MEGABYTE: u64 = 2048;

fn create_image_args(size_mb: u64) -> Vec<String> {
    vec![
        "-nomount".to_string(),
        format!("ram://{}", SECTORS_PER_MEGABYTE * size_mb),
    ]
}

fn erase_args(device_path: &str, name: &str, file_system: FileSystem) -> Vec<String> {
    // diskutil arguments are positional; order matters.
    vec![
        "erasedisk".to_string(),
        file_system.identifier().to_string(),
        name.to_string(),
        device_path.to_string(),
    ]
}

fn eject_args(device_path: &str) -> Vec<String> {
    vec!["eject".to_string(), device_path.to_string()]
}

/// Create a memory-backed disk image of `size_mb` megabytes.
///
/// Runs `hdid -nomount ram://<sectors>`. On success the captured output is
/// the device path assigned by the OS, trailing whitespace stripped; callers
/// must not assume anything about its format beyond that.
///
/// # Errors
/// `DiskError::InvalidSize` if `size_mb` is zero, `DiskError::Launch` if
/// `hdid` could not be started.
pub async fn create_disk_image(size_mb: u64) -> Result<CommandResult> {
    if size_mb == 0 {
        return Err(DiskError::InvalidSize { size: size_mb });
    }

    info!("creating {} MB RAM disk image", size_mb);
    command::run(HDID, &create_image_args(size_mb)).await
}

/// Erase and format the device at `device_path`, destroying its content.
///
/// Runs `diskutil erasedisk <file system> <name> <device path>`. The device
/// path is not checked against any real device; that is the caller's
/// responsibility.
pub async fn erase_disk(
    device_path: &str,
    name: &str,
    file_system: FileSystem,
) -> Result<CommandResult> {
    if device_path.is_empty() {
        return Err(DiskError::EmptyDevicePath);
    }

    info!("erasing {} as \"{}\" ({})", device_path, name, file_system);
    command::run(DISKUTIL, &erase_args(device_path, name, file_system)).await
}

/// Eject the device at `device_path`, destroying any unsaved data on it.
pub async fn eject_disk(device_path: &str) -> Result<CommandResult> {
    if device_path.is_empty() {
        return Err(DiskError::EmptyDevicePath);
    }

    info!("ejecting {}", device_path);
    command::run(DISKUTIL, &eject_args(device_path)).await
}

/// Description of a RAM disk to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamDiskSpec {
    /// Size of the backing memory region in megabytes
    pub size_mb: u64,

    /// Volume name assigned when formatting
    pub volume_name: String,

    /// File system the volume is formatted with
    pub file_system: FileSystem,
}

impl RamDiskSpec {
    /// Describe a RAM disk formatted as APFS.
    pub fn new<N: Into<String>>(size_mb: u64, volume_name: N) -> Self {
        Self {
            size_mb,
            volume_name: volume_name.into(),
            file_system: FileSystem::Apfs,
        }
    }

    /// Set the file system the volume is formatted with.
    pub fn with_file_system(mut self, file_system: FileSystem) -> Self {
        self.file_system = file_system;
        self
    }
}

/// Handle to a created and formatted RAM disk.
///
/// Unlike the bare operations, the lifecycle methods interpret tool output:
/// a non-zero exit status or any stderr text counts as failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamDisk {
    device_path: String,
}

impl RamDisk {
    /// Create and format a RAM disk as described by `spec`.
    pub async fn create(spec: &RamDiskSpec) -> Result<Self> {
        let created = create_disk_image(spec.size_mb).await?;
        let device_path = interpret(HDID, &created)?.to_string();
        if device_path.is_empty() {
            return Err(DiskError::ToolFailure {
                command: HDID.to_string(),
                status: created.status,
                error: "no device path reported".to_string(),
            });
        }

        let erased = erase_disk(&device_path, &spec.volume_name, spec.file_system).await?;
        interpret(DISKUTIL, &erased)?;

        info!("RAM disk ready at {}", device_path);
        Ok(Self { device_path })
    }

    /// Device path assigned by the OS when the disk was created.
    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    /// Eject the disk, destroying anything stored on it.
    pub async fn eject(self) -> Result<()> {
        let ejected = eject_disk(&self.device_path).await?;
        interpret(DISKUTIL, &ejected)?;
        Ok(())
    }
}

/// Treat a non-zero exit or any stderr text as tool failure.
fn interpret<'a>(command: &str, result: &'a CommandResult) -> Result<&'a str> {
    if result.is_success() && result.error.is_empty() {
        Ok(&result.output)
    } else {
        Err(DiskError::ToolFailure {
            command: command.to_string(),
            status: result.status,
            error: result.error.clone(),
        })
    }
}
