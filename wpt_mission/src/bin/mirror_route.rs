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

use wpt_common::{define_cli, check_cli, fs::filepath_with_stem_suffix};
use wpt_mission::{
    load_config, mirror_offset, op_failed, read_wpl_file, write_wpl_file,
    MirrorOffsetParams, MirrorRules, Result, TaskSchedule
};

define_cli! { ARGS [about="mirror_route - apply the mirror/offset transform to a mission file"] =
    dx: Option<f64> [help="planar east offset in meters", allow_hyphen_values=true, long],
    dy: Option<f64> [help="planar north offset in meters", allow_hyphen_values=true, long],
    alt1: f64 [help="target altitude for the low index band (m)", long, default_value="6.0"],
    alt2: Option<f64> [help="target altitude for the high index band (m)", allow_hyphen_values=true, long],
    schedule: Option<String> [help="filename of RON task schedule config", short, long],
    task: Option<usize> [help="1-based task row in the schedule", short, long],
    calibrate: bool [help="add the schedule calibration deltas to the selected offsets", short, long],
    path: String [help="mission file to transform"]
}

fn main () {
    check_cli!(ARGS);
    tracing_subscriber::fmt().init();

    if let Err(e) = run() {
        eprintln!("mirror_route failed: {e}");
        std::process::exit(1);
    }
}

fn run () -> Result<()> {
    let (params, task) = resolve_params()?;

    let mission = read_wpl_file( &ARGS.path)?;
    let transformed = mirror_offset( &mission, &params, &MirrorRules::default())?;

    let suffix = match task {
        Some(n) => format!("_mirrored_offset_{n}"),
        None => "_mirrored_offset".to_string()
    };
    let out_path = filepath_with_stem_suffix( &ARGS.path, &suffix);
    write_wpl_file( &out_path, &transformed)?;

    println!("offset mission saved to {}", out_path.display());
    Ok(())
}

fn resolve_params () -> Result<(MirrorOffsetParams, Option<usize>)> {
    if let (Some(schedule_path), Some(task)) = (&ARGS.schedule, ARGS.task) {
        let schedule: TaskSchedule = load_config( schedule_path)?;
        Ok( (schedule.params_for_task( task, ARGS.calibrate)?, Some(task)))

    } else if let (Some(dx), Some(dy), Some(alt2)) = (ARGS.dx, ARGS.dy, ARGS.alt2) {
        Ok( (MirrorOffsetParams { dx, dy, alt1: ARGS.alt1, alt2 }, None))

    } else {
        Err( op_failed("either --schedule with --task or explicit --dx/--dy/--alt2 required"))
    }
}
