//! Embedded-media sufficiency check.

use crate::annotate;
use crate::model::Document;

/// Substrings treated as evidence of an embedded or linked video.
const VIDEO_MARKERS: [&str; 4] = ["youtube.com", "youtu.be", "vimeo.com", "video"];

/// Check image count against the configured minimum and look for video
/// references in the document text.
///
/// Produces two report lines: image-count status and video-presence status.
/// Insufficient images additionally append one document-level notice.
pub fn check_media(doc: &mut Document, min_images: u32) -> Vec<String> {
    let img_count = doc.media_count();
    let full_text = doc.full_text();
    let has_video = VIDEO_MARKERS.iter().any(|k| full_text.contains(k));

    let mut lines = Vec::new();

    if (img_count as u32) < min_images {
        annotate::append_notice(
            doc,
            &format!(
                "이미지 개수가 부족합니다. (현재 {}장 / 기준 {}장 이상)",
                img_count, min_images
            ),
        );
        lines.push(format!(
            "- [룰] 이미지 개수 부족: {}장 (기준 {}장)",
            img_count, min_images
        ));
    } else {
        lines.push(format!("- [룰] 이미지 개수 충족: {}장", img_count));
    }

    if has_video {
        lines.push("- [룰] 동영상 URL 포함됨 (youtube 등)".to_string());
    } else {
        lines.push("- [룰] 동영상 삽입 없음 (영상 1개 이상 권장)".to_string());
    }

    lines
}
