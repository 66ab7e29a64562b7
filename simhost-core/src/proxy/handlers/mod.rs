mod static_file;

pub(crate) use static_file::StaticFileHandler;
