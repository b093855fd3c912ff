use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeclError {
    #[error("failed to run '{clang}' (set CLANG or add clang to PATH): {source}")]
    ClangNotFound {
        clang: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clang produced no declaration tree for '{header}'")]
    EmptyTree { header: String },

    #[error("failed to deserialize the clang declaration tree: {0}")]
    Tree(#[from] serde_json::Error),
}
