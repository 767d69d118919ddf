//! RAM disk management for macOS.
//!
//! Creates memory-backed block devices by driving the system `hdid` and
//! `diskutil` tools and capturing their output. Every operation is a single
//! external process invocation delivered as one [`CommandResult`]; the
//! library performs no structured parsing of tool output and imposes no
//! timeout, retry or concurrency limit of its own.
//!
//! The bare operations ([`create_disk_image`], [`erase_disk`],
//! [`eject_disk`]) return captured output verbatim for the caller to
//! interpret. The [`RamDisk`] handle chains them into a
//! create → format → eject lifecycle:
//!
//! ```no_run
//! use ramdisk::{FileSystem, RamDisk, RamDiskSpec};
//!
//! # async fn demo() -> ramdisk::Result<()> {
//! let spec = RamDiskSpec::new(100, "Scratch").with_file_system(FileSystem::Apfs);
//! let disk = RamDisk::create(&spec).await?;
//! println!("RAM disk at {}", disk.device_path());
//! disk.eject().await?;
//! # Ok(())
//! # }
//! ```

mod command;
mod error;
mod filesystem;
mod ramdisk;

pub use command::{CommandResult, run};
pub use error::{DiskError, Result};
pub use filesystem::FileSystem;
pub use ramdisk::{
    DISKUTIL, HDID, RamDisk, RamDiskSpec, create_disk_image, eject_disk, erase_disk,
};
