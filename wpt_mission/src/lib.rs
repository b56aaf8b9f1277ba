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
#![allow(unused)]

//! mission file transforms for QGC WPL 110 waypoint routes.
//!
//! Both transforms project waypoint positions into a fixed planar frame (one UTM zone derived
//! from a reference waypoint), apply pure 2D geometry there and project the results back:
//!
//! - [`mirror_offset`] translates designated reference waypoints by a planar offset, stages
//!   the moved positions onto their recipient waypoints and applies index-banded altitudes
//! - [`align_origin`] rigidly translates the whole route so that the reference waypoint
//!   coincides with a given current position, with one altitude for all rows
//!
//! Transforms are pure Mission -> Mission functions. Re-running one on its own output with the
//! same parameters translates the route again (offsets compose additively).

use std::ops::RangeInclusive;
use std::path::Path;
use serde::{Serialize,Deserialize};
use serde::de::DeserializeOwned;

use wpt_common::cartesian2::{Cartesian2, ImplicitLine2};
use wpt_common::fs::filepath_contents_as_string;
use wpt_common::geo::GeoPoint;
use wpt_common::utm::{self, UtmZone, UTM};

pub mod wpl;
pub use wpl::*;

mod errors;
pub use errors::*;

pub type Result<T> = std::result::Result<T, WptMissionError>;

/// load a RON config record (e.g. a [`TaskSchedule`]) from the given file
pub fn load_config <C: DeserializeOwned, P: AsRef<Path>> (path: P) -> Result<C> {
    let contents = filepath_contents_as_string( &path)?;
    Ok( ron::from_str( &contents)?)
}

/* #region index rules ********************************************************************************************/

/// the index-keyed rule table of the mirror/offset pipeline, in one place so that the
/// cross-index staging stays visible and testable.
///
/// `line_anchors` name the two waypoints that define the mirror line (and double as offset
/// sources). Each `offset_recipients` pair (source, recipient) makes the recipient adopt the
/// offset-translated position of the source - note the deliberate cross mapping in the default
/// table: waypoint 5 receives the moved position of waypoint 4 and waypoint 6 that of
/// waypoint 3, not their own. The altitude bands apply by index alone, georeferenced or not
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct MirrorRules {
    pub line_anchors: (u32, u32),
    pub offset_recipients: Vec<(u32, u32)>,
    pub alt1_indices: RangeInclusive<u32>,
    pub alt2_indices: RangeInclusive<u32>,
}

impl Default for MirrorRules {
    fn default () -> Self {
        MirrorRules {
            line_anchors: (3, 4),
            offset_recipients: vec![(4, 5), (3, 6)],
            alt1_indices: 0..=4,
            alt2_indices: 5..=7,
        }
    }
}

/* #endregion index rules */

/* #region transform parameters ***********************************************************************************/

/// per-invocation parameters of the mirror/offset transform
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct MirrorOffsetParams {
    /// planar east offset in meters
    pub dx: f64,
    /// planar north offset in meters
    pub dy: f64,
    /// target altitude for the alt1 index band (m)
    pub alt1: f64,
    /// target altitude for the alt2 index band (m)
    pub alt2: f64,
}

/// one row of a [`TaskSchedule`]
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct TaskParams {
    pub dx: f64,
    pub dy: f64,
    pub alt2: f64,
}

/// externally supplied per-run offset/altitude schedule. This replaces the hard coded
/// experiment table of earlier tool versions - one row per task, selected by 1-based task
/// number, with optional calibration deltas that can be added to the selected offsets
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TaskSchedule {
    pub alt1: f64,

    #[serde(default)]
    pub cal_dx: f64,
    #[serde(default)]
    pub cal_dy: f64,

    pub tasks: Vec<TaskParams>,
}

impl TaskSchedule {
    /// resolve the 1-based task row into transform parameters
    pub fn params_for_task (&self, task: usize, calibrate: bool) -> Result<MirrorOffsetParams> {
        if task == 0 || task > self.tasks.len() {
            return Err( op_failed( format!("task {} out of schedule range 1..={}", task, self.tasks.len())))
        }

        let t = self.tasks[task-1];
        let mut dx = t.dx;
        let mut dy = t.dy;
        if calibrate {
            dx += self.cal_dx;
            dy += self.cal_dy;
        }

        Ok( MirrorOffsetParams { dx, dy, alt1: self.alt1, alt2: t.alt2 })
    }
}

/* #endregion transform parameters */

/* #region transforms *********************************************************************************************/

fn project (p: &GeoPoint, utm_zone: UtmZone) -> Result<Cartesian2> {
    utm::geo_to_utm_zone( p, utm_zone)
        .map( |u| u.as_cartesian2())
        .ok_or_else( || op_failed( format!("position {} outside projectable latitude range", p)))
}

fn unproject (p: &Cartesian2, utm_zone: UtmZone) -> GeoPoint {
    utm::utm_to_geo( &UTM::from_cartesian2( p, utm_zone))
}

/// translate the rule table's source waypoints by (dx,dy) in the planar frame, stage the moved
/// positions onto their recipient waypoints and apply the index-banded target altitudes.
///
/// Note the anchors also define a mirror line, which is computed here so that coincident
/// anchors are rejected before any output is produced - but live waypoint positions are only
/// ever translated/cross-copied, never reflected (see DESIGN.md for this known discrepancy
/// between the name and the behavior of the pipeline)
pub fn mirror_offset (mission: &Mission, params: &MirrorOffsetParams, rules: &MirrorRules) -> Result<Mission> {
    let (i1, i2) = rules.line_anchors;
    let anchor1 = mission.reference_position(i1)?;
    let anchor2 = mission.reference_position(i2)?;

    // one fixed frame for the whole mission, derived from the second anchor
    let utm_zone = utm::naive_utm_zone( &anchor2);
    let p1 = project( &anchor1, utm_zone)?;
    let p2 = project( &anchor2, utm_zone)?;

    let _mirror_line = ImplicitLine2::from_points( &p1, &p2).ok_or( WptMissionError::DegenerateLine)?;

    let offset = Cartesian2::new( params.dx, params.dy);

    // staged geodetic positions, keyed by recipient index
    let mut staged: Vec<(u32,GeoPoint)> = Vec::with_capacity( rules.offset_recipients.len());
    for &(source, recipient) in &rules.offset_recipients {
        let p = project( &mission.reference_position(source)?, utm_zone)?;
        staged.push( (recipient, unproject( &(p + offset), utm_zone)));
    }

    let mut waypoints = Vec::with_capacity( mission.len());
    for wp in &mission.waypoints {
        let mut new_wp = wp.clone();

        if wp.has_position() {
            if let Some((_,pos)) = staged.iter().find( |(recipient,_)| *recipient == wp.index) {
                new_wp.set_position( pos);
            }
        }

        if rules.alt1_indices.contains( &wp.index) { new_wp.alt = Some(params.alt1) }
        if rules.alt2_indices.contains( &wp.index) { new_wp.alt = Some(params.alt2) }

        waypoints.push( new_wp);
    }

    Ok( Mission{ waypoints })
}

/// rigidly translate the whole mission so that the first line anchor ends up on the given
/// current position, and set every row to the single target altitude. The second anchor is
/// validated as well, keeping the precondition surface identical to [`mirror_offset`]
pub fn align_origin (mission: &Mission, current: GeoPoint, alt: f64, rules: &MirrorRules) -> Result<Mission> {
    let (i_ref, i_aux) = rules.line_anchors;
    let reference = mission.reference_position(i_ref)?;
    mission.reference_position(i_aux)?;

    let utm_zone = utm::naive_utm_zone( &reference);
    let p_ref = project( &reference, utm_zone)?;
    let p_cur = project( &current, utm_zone)?;
    let delta = p_cur - p_ref;

    let mut waypoints = Vec::with_capacity( mission.len());
    for wp in &mission.waypoints {
        let mut new_wp = wp.clone();

        if let Some(pos) = wp.position() {
            let p = project( &pos, utm_zone)?;
            new_wp.set_position( &unproject( &(p + delta), utm_zone));
        }
        new_wp.alt = Some(alt);

        waypoints.push( new_wp);
    }

    Ok( Mission{ waypoints })
}

/* #endregion transforms */
