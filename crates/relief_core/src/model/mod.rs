pub mod accessibility;
pub mod center;
pub mod kilometers;
pub mod location;
pub mod minutes;
pub mod need_site;
pub mod resources;
pub mod road_segment;
pub mod severity;
