use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and optionally size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack::with_max_len(overflow_message, usize::max_value())
    }
    pub fn with_max_len(overflow_message: &'static str, max_len: usize) -> Stack<T> {
        Stack {
            overflow_message,
            max_len,
            vec: vec![],
        }
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() >= self.max_len {
            Err(error!(StackOverflow; self.overflow_message))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    /// Fails unless at least `len` items are present.
    pub fn require(&self, len: usize) -> Result<()> {
        if self.vec.len() < len {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    /// Item `depth` places below the top. Zero is the top.
    pub fn peek(&self, depth: usize) -> Result<&T> {
        self.require(depth + 1)?;
        Ok(&self.vec[self.vec.len() - 1 - depth])
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.overflow_check()?;
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.require(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<T>> {
        self.require(len)?;
        let range = (self.vec.len() - len)..;
        Ok(self.vec.drain(range).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_underflow_leaves_stack_alone() {
        let mut s: Stack<i32> = Stack::new("");
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert!(s.is_empty());
        s.push(1).unwrap();
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop_n(3).unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_order() {
        let mut s: Stack<i32> = Stack::new("");
        for n in 1..=4 {
            s.push(n).unwrap();
        }
        assert_eq!(*s.peek(0).unwrap(), 4);
        assert_eq!(*s.peek(3).unwrap(), 1);
        assert!(s.peek(4).is_err());
        assert_eq!(s.pop_2().unwrap(), (3, 4));
        assert_eq!(s.pop_n(2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_max_len() {
        let mut s: Stack<i32> = Stack::with_max_len("TOO DEEP", 2);
        s.push(1).unwrap();
        s.push(2).unwrap();
        let e = s.push(3).unwrap_err();
        assert_eq!(e.code(), ErrorCode::StackOverflow);
        assert_eq!(e.to_string(), "STACK OVERFLOW; TOO DEEP");
        assert_eq!(s.len(), 2);
    }
}
