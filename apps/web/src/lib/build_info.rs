#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub const VERSION: &str = built_info::PKG_VERSION;
