//! Command line for one yt-dlp invocation.

use std::ffi::OsString;

use tubegrab_core::FetchConfiguration;

/// Printed before each item is downloaded: a one-line JSON object with the
/// fields worth logging.
const METADATA_PRINT: &str = "before_dl:%(.{id,title,ext,extractor_key})j";

/// Printed right after the metadata line: the filename prepared from the
/// output template, carrying the pre-merge extension.
const FILENAME_PRINT: &str = "before_dl:filename";

/// Containers yt-dlp accepts for `--merge-output-format`.
const MERGE_CONTAINERS: [&str; 6] = ["avi", "flv", "mkv", "mov", "mp4", "webm"];

/// Build the argument list (excluding the program and configured extras).
///
/// A video container is passed as the merge format; any other target
/// format is produced by audio extraction instead.
pub fn build_args(url: &str, config: &FetchConfiguration) -> Vec<OsString> {
    let target = config.merge_output_format.as_str();
    let mut args: Vec<OsString> = vec![
        "-f".into(),
        config.format_selector.as_str().into(),
        "-o".into(),
        config.output_template.as_os_str().to_owned(),
    ];

    if MERGE_CONTAINERS.contains(&target) {
        args.extend(["--merge-output-format", target].map(OsString::from));
    } else {
        args.extend(["--extract-audio", "--audio-format", target].map(OsString::from));
    }

    args.push(if config.allow_playlist {
        "--yes-playlist".into()
    } else {
        "--no-playlist".into()
    });

    if config.quiet {
        args.extend(["--quiet", "--no-warnings"].map(OsString::from));
    }

    // --print implies --simulate unless told otherwise
    args.extend(
        [
            "--no-simulate",
            "--newline",
            "--print",
            METADATA_PRINT,
            "--print",
            FILENAME_PRINT,
        ]
        .map(OsString::from),
    );

    args.push("--".into());
    args.push(url.into());
    args
}
