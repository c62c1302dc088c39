use crate::protocol::SOH;

/// Returns the value of the first occurrence of `tag_prefix` (e.g. `"270="`) in
/// `segment`.
///
/// The value runs to the next SOH delimiter, or to the end of the segment when
/// the field is the last one and carries no trailing delimiter. The result is a
/// view into `segment`; nothing is copied.
///
/// ```
/// use fixmd::extract_field_value;
///
/// let segment = "269=2\x01270=50000.00\x01271=1.5";
/// assert_eq!(extract_field_value(segment, "270="), Some("50000.00"));
/// assert_eq!(extract_field_value(segment, "271="), Some("1.5"));
/// assert_eq!(extract_field_value(segment, "290="), None);
/// ```
#[inline]
pub fn extract_field_value<'a>(segment: &'a str, tag_prefix: &str) -> Option<&'a str> {
    let start = segment.find(tag_prefix)? + tag_prefix.len();
    let rest = &segment[start..];
    match rest.as_bytes().iter().position(|&b| b == SOH) {
        Some(end) => Some(&rest[..end]),
        None => Some(rest),
    }
}

/// Looks up a whole field by tag number.
///
/// Unlike [`extract_field_value`], the tag must start a field (beginning of the
/// text or right after SOH), so tag 35 never matches inside `135=`. Used for the
/// header and body fields that sit outside the repeating group.
pub fn field_value(raw: &str, tag: u32) -> Option<&str> {
    raw.split(SOH as char).find_map(|field| {
        let (field_tag, value) = field.split_once('=')?;
        (field_tag.parse::<u32>().ok()? == tag).then_some(value)
    })
}
