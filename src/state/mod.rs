mod persistence;

pub use persistence::{
    import_catalog_csv, load_catalog, load_pantry, save_catalog, save_pantry,
};
