pub(crate) mod fingerprint;
pub(crate) mod props;
pub(crate) mod scene;
pub(crate) mod sink;
