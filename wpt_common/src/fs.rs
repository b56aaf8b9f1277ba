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

use std::fs::{self,File};
use std::io::{self,Read,Write,Error as IOError,ErrorKind};
use std::path::{Path,PathBuf};

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T) -> Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn extension<'a,T: AsRef<Path>> (path: &'a T) -> Option<&'a str> {
    path.as_ref().extension().and_then(|ostr| ostr.to_str())
}

pub fn filestem<'a,T: AsRef<Path>> (path: &'a T) -> Option<&'a str> {
    path.as_ref().file_stem().and_then(|ostr| ostr.to_str())
}

pub fn file_contents_as_string (file: &mut fs::File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    file_contents_as_string( &mut file)
}

pub fn existing_non_empty_file_from_path <P: AsRef<Path>> (path: P) -> Result<File> {
    let file = File::open( path.as_ref())?;
    let md = file.metadata()?;
    if md.len() > 0 {
        Ok(file)
    } else {
        Err( IOError::new( ErrorKind::Other, format!("file empty: {:?}", path.as_ref())))
    }
}

pub fn set_filepath_contents <P: AsRef<Path>> (path: &P, new_contents: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(new_contents)?;
    Ok(())
}

/// derived output pathname: same directory and extension, suffix appended to the file stem
/// ("a/b.waypoints" + "_x" -> "a/b_x.waypoints")
pub fn filepath_with_stem_suffix (path: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let path = path.as_ref();
    let mut fname = String::from( filestem(&path).unwrap_or(""));
    fname.push_str( suffix);
    if let Some(ext) = extension(&path) {
        fname.push('.');
        fname.push_str(ext);
    }
    path.with_file_name( fname)
}
