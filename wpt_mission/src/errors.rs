/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use thiserror::Error;

#[derive(Error,Debug)]
pub enum WptMissionError {

    #[error("mission has no waypoints")]
    EmptyMission,

    #[error("reference waypoint {0} not found or has no position")]
    MissingReference(u32),

    #[error("reflection anchors coincide, mirror line is undefined")]
    DegenerateLine,

    // generic self-created error
    #[error("mission operation failed: {0}")]
    OpFailedError(String),

    // pass through for IO errors
    #[error("mission IO error: {0}")]
    IOError( #[from] std::io::Error),

    // pass through for RON config errors
    #[error("mission config error: {0}")]
    ConfigError( #[from] ron::error::SpannedError),

}

pub fn op_failed<S: ToString> (msg: S) -> WptMissionError {
    WptMissionError::OpFailedError(msg.to_string())
}
