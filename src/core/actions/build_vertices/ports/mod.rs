pub mod vertex_sink;
