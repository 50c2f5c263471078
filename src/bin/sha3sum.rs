//! Print SHA-3 digests of files, in the format of `sha256sum`.
//!
//! ```text
//! sha3sum -a 512 Cargo.toml README.md
//! cat Cargo.toml | sha3sum
//! ```

use std::{
    fs::File,
    io::{
        self,
        Read,
    },
    process,
};

use gumdrop::Options;

use sha3_sponge::{
    sha3_sponge_core::{
        wrapped_err,
        Errors::InputReadFailure,
        Result,
        WrappedError,
    },
    DigestSize,
    Sha3,
};

/// Input is streamed through the session in pieces of this size.
const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(
        short = "a",
        meta = "BITS",
        default = "256",
        help = "digest size: 224, 256, 384 or 512 (default: 256)"
    )]
    algorithm: DigestSize,

    #[options(free, help = "files to hash; '-' or none reads stdin")]
    files: Vec<String>,
}

fn absorb_reader<R: Read>(sha3: &mut Sha3, mut reader: R) -> io::Result<()> {
    let mut buf = vec![0_u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => sha3.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn hash_input(sha3: &mut Sha3, name: &str) -> Result<String> {
    let absorbed = if name == "-" {
        let stdin = io::stdin();
        let lock = stdin.lock();
        absorb_reader(sha3, lock)
    } else {
        File::open(name).and_then(|file| absorb_reader(sha3, file))
    };

    match absorbed {
        Ok(()) => Ok(sha3.finish_hex()),
        Err(e) => {
            sha3.reset();
            Err(wrapped_err!(InputReadFailure(name.to_string()), WrappedError(e)))
        }
    }
}

fn main() {
    let args = Args::parse_args_default_or_exit();
    let mut sha3 = Sha3::with_size(args.algorithm);

    let files = if args.files.is_empty() {
        vec!["-".to_string()]
    } else {
        args.files
    };

    let mut failed = false;
    for name in files.iter() {
        match hash_input(&mut sha3, name) {
            Ok(digest) => println!("{}  {}", digest, name),
            Err(e) => {
                eprintln!("sha3sum: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
