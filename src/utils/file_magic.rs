/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// 教师入驻材料只接受证件照片与 PDF 文档，
/// 扩展名允许列表之外的类型一律拒绝。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        ".png" => data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn accepts_matching_headers() {
        assert!(validate_magic_bytes(&PNG_HEADER, ".png"));
        assert!(validate_magic_bytes(&PNG_HEADER, ".PNG"));
        assert!(validate_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0], ".jpeg"));
        assert!(validate_magic_bytes(b"%PDF-1.7", ".pdf"));
    }

    #[test]
    fn rejects_header_extension_mismatch() {
        assert!(!validate_magic_bytes(&PNG_HEADER, ".jpg"));
        assert!(!validate_magic_bytes(b"%PDF-1.7", ".png"));
    }

    #[test]
    fn rejects_empty_and_unlisted_types() {
        assert!(!validate_magic_bytes(&[], ".png"));
        assert!(!validate_magic_bytes(&[0x4D, 0x5A, 0x90, 0x00], ".exe"));
        assert!(!validate_magic_bytes(b"GIF89a", ".gif"));
    }
}
