pub mod dashboard;
pub mod diy_generator;
pub mod header;
pub mod product_scan;
pub mod report_analysis;
pub mod results;
pub mod upload_section;
pub mod utils;
