use crate::mach::{Input, Printer, Runtime};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

mod for_test;

#[derive(Clone, Default)]
struct Buffer(Rc<RefCell<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct NoInput;

impl Input for NoInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}

fn runtime_with(input: Box<dyn Input>) -> (Runtime, Buffer) {
    let buffer = Buffer::default();
    let r = Runtime::new(Box::new(Printer::new(buffer.clone(), 8)), input);
    (r, buffer)
}

fn run(lines: &[&str]) -> String {
    let (mut r, buffer) = runtime_with(Box::new(NoInput));
    for line in lines {
        r.enter(line);
    }
    r.enter("RUN");
    let bytes = buffer.0.borrow().clone();
    String::from_utf8(bytes).unwrap()
}
