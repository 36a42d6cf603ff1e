pub mod gcs_object_store;
