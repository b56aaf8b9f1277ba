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

use wpt_common::{define_cli, check_cli, fs::filepath_with_stem_suffix, geo::GeoPoint};
use wpt_mission::{align_origin, read_wpl_file, write_wpl_file, MirrorRules, Result};

define_cli! { ARGS [about="align_route - translate a mission so that its reference waypoint matches the current position"] =
    lat: f64 [help="current latitude (deg)", allow_hyphen_values=true, long],
    lon: f64 [help="current longitude (deg)", allow_hyphen_values=true, long],
    alt: f64 [help="target altitude for all waypoints (m)", allow_hyphen_values=true, long],
    path: String [help="mission file to align"]
}

fn main () {
    check_cli!(ARGS);
    tracing_subscriber::fmt().init();

    if let Err(e) = run() {
        eprintln!("align_route failed: {e}");
        std::process::exit(1);
    }
}

fn run () -> Result<()> {
    let current = GeoPoint::from_lon_lat_degrees( ARGS.lon, ARGS.lat);

    let mission = read_wpl_file( &ARGS.path)?;
    let aligned = align_origin( &mission, current, ARGS.alt, &MirrorRules::default())?;

    let out_path = filepath_with_stem_suffix( &ARGS.path, "_origin_alignment");
    write_wpl_file( &out_path, &aligned)?;

    println!("aligned mission saved to {}", out_path.display());
    Ok(())
}
