//! `agent`: hand the arguments to the detected manager unchanged

use super::Command;
use crate::agent::Agent;

pub fn translate(agent: Agent, args: &[String]) -> Command {
    Command::new(agent.as_str(), args)
}
