pub mod generate_ifs_points;
pub mod generate_ifs_points_rayon;
