//! Response compression.

use tower_http::compression::CompressionLayer;

/// Gzip responses for clients that send `Accept-Encoding: gzip`. Job and
/// customer lists are the only bodies large enough to benefit.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
