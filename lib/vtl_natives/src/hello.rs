use anyhow::Result;
use std::io::Write;

pub const HELLO: &str = "Hello World!\n";

/// Greeter called through an instance
#[derive(Debug, Default)]
pub struct HelloJni;

/// Greeter called through the type itself
#[derive(Debug)]
pub struct CallStatic;

impl HelloJni {
    pub fn new() -> HelloJni {
        HelloJni
    }

    pub fn say_hello(&self, out: &mut dyn Write) -> Result<()> {
        say_hello(out)
    }
}

impl CallStatic {
    pub fn say_hello(out: &mut dyn Write) -> Result<()> {
        say_hello(out)
    }
}

fn say_hello(out: &mut dyn Write) -> Result<()> {
    out.write_all(HELLO.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_method() -> Result<()> {
        let mut out: Vec<u8> = vec![];
        HelloJni::new().say_hello(&mut out)?;
        assert_eq!(String::from_utf8(out)?, "Hello World!\n");
        Ok(())
    }

    #[test]
    fn test_static_method() -> Result<()> {
        let mut out: Vec<u8> = vec![];
        CallStatic::say_hello(&mut out)?;
        CallStatic::say_hello(&mut out)?;
        assert_eq!(String::from_utf8(out)?, "Hello World!\nHello World!\n");
        Ok(())
    }
}
