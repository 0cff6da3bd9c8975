/// Image file handling
///
/// This module handles:
/// - Finding supported image files in a folder
/// - Decoding them into thumbnails
/// - Running a whole folder import off the UI thread

pub mod import;
pub mod scan;
pub mod thumbnail;
