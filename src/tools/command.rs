// file: src/tools/command.rs
// description: argument lists for the HandBrakeCLI, ffmpeg and hdr10plus_tool invocations
// reference: HandBrakeCLI, ffmpeg and hdr10plus_tool command line interfaces

use crate::config::EncodeConfig;
use std::ffi::OsString;
use std::path::Path;

/// HandBrakeCLI: AV1 source to a small 10-bit HEVC Matroska without audio or
/// subtitles. HDR10+ SEI is carried through by the x265 encoder.
pub fn transcode_args(input: &Path, output: &Path, encode: &EncodeConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(26);
    args.push("-i".into());
    args.push(input.into());
    args.push("-o".into());
    args.push(output.into());

    let options = [
        ("--encoder", encode.encoder.clone()),
        ("--encoder-preset", encode.preset.clone()),
        ("--quality", encode.quality.to_string()),
        ("--vb", encode.bitrate_kbps.to_string()),
        ("--width", encode.width.to_string()),
        ("--height", encode.height.to_string()),
        ("--crop", encode.crop.clone()),
        ("--format", encode.format.clone()),
        ("--audio", "none".to_string()),
        ("--subtitle", "none".to_string()),
    ];

    for (flag, value) in options {
        args.push(flag.into());
        args.push(value.into());
    }

    args
}

/// ffmpeg: copy the video stream out as Annex-B HEVC on stdout.
pub fn demux_args(intermediate: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-y", "-nostdin", "-loglevel", "error", "-stats", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(intermediate.into());
    args.extend(
        ["-c:v", "copy", "-bsf:v", "hevc_mp4toannexb", "-f", "hevc", "-"]
            .into_iter()
            .map(OsString::from),
    );
    args
}

/// hdr10plus_tool: read Annex-B HEVC from stdin, write JSON metadata.
pub fn extract_args(metadata: &Path) -> Vec<OsString> {
    vec!["extract".into(), "-".into(), "-o".into(), metadata.into()]
}

pub fn plot_args(metadata: &Path, title: &str, plot: &Path) -> Vec<OsString> {
    vec![
        "plot".into(),
        metadata.into(),
        "-t".into(),
        title.into(),
        "-o".into(),
        plot.into(),
    ]
}
