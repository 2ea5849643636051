pub(crate) struct Reader<'a, T> {
    stream: &'a [T],
    pos: usize,
}

impl<'a, T> Reader<'a, T> {
    pub(crate) fn new(stream: &'a [T]) -> Self {
        Self { stream, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a T> {
        self.stream.get(self.pos)
    }

    pub(crate) fn pop(&mut self) -> Option<&'a T> {
        let out = self.stream.get(self.pos)?;
        self.pos += 1;
        Some(out)
    }

    pub(crate) fn pop_if(&mut self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        match self.peek() {
            Some(item) if item == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }
}
