pub mod es_repository_impl;
