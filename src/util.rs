use std::{
    fs::File,
    io::{self, ErrorKind, Read, Write},
    path::Path,
};

use bincode::{config, Decode, Encode};

/// Save to file, using Bincode. We currently use this for the run config.
pub fn save<T: Encode>(path: &Path, data: &T) -> io::Result<()> {
    let encoded: Vec<u8> = bincode::encode_to_vec(data, config::standard())
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e.to_string()))?;

    let mut file = File::create(path)?;
    file.write_all(&encoded)?;
    Ok(())
}

/// Load from file, using Bincode.
pub fn load<T: Decode<()>>(path: &Path) -> io::Result<T> {
    let mut buffer = Vec::new();
    let mut file = File::open(path)?;
    file.read_to_end(&mut buffer)?;

    let (decoded, _len) = bincode::decode_from_slice(&buffer, config::standard())
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e.to_string()))?;
    Ok(decoded)
}
