pub mod documentation;
pub mod health_service;
pub mod scores_service;
