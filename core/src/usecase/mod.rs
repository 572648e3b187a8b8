pub mod determine_action;
