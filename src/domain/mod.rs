pub mod create_team;
pub mod delete_team;
pub mod entities;
pub mod find_all_teams;
pub mod find_crest;
pub mod find_team;
pub mod update_team;

#[cfg(test)]
pub mod mocks;
