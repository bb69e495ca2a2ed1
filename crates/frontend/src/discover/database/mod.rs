pub mod deploy_service;
