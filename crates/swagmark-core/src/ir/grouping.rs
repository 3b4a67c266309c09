use indexmap::IndexMap;

use super::operations::ApiOperation;
use super::types::ApiDoc;

/// The operations filed under one tag.
#[derive(Debug, Clone)]
pub struct TagGroup<'a> {
    pub name: &'a str,
    pub operations: Vec<&'a ApiOperation>,
}

/// Bucket every operation under each of its tags.
///
/// Tags appear in first-seen order while walking paths in document order, and
/// operations within a bucket keep that same order. An operation with several
/// tags is listed in every one of their buckets; untagged operations are left
/// out entirely.
pub fn group_by_tag(doc: &ApiDoc) -> Vec<TagGroup<'_>> {
    let mut groups: IndexMap<&str, Vec<&ApiOperation>> = IndexMap::new();

    for path in &doc.paths {
        for op in &path.operations {
            for tag in &op.tags {
                let bucket = groups.entry(tag.as_str()).or_default();
                // A tag repeated on one operation must not list it twice.
                if !bucket.iter().any(|o| std::ptr::eq(*o, op)) {
                    bucket.push(op);
                }
            }
        }
    }

    groups
        .into_iter()
        .map(|(name, operations)| TagGroup { name, operations })
        .collect()
}
