//! Operation flags.

bitflags! {
    /// Represents the bit vector of options for an OP_UPDATE message.
    pub struct OpUpdateFlags: i32 {
        const UPSERT       = 0b00000001;
        const MULTI_UPDATE = 0b00000010;
    }
}

bitflags! {
    /// Represents the bit vector of flags for an OP_INSERT message.
    pub struct OpInsertFlags: i32 {
        const CONTINUE_ON_ERROR = 0b00000001;
    }
}

bitflags! {
    /// Represents the bit vector of flags for an OP_DELETE message.
    pub struct OpDeleteFlags: i32 {
        const SINGLE_REMOVE = 0b00000001;
    }
}

impl OpUpdateFlags {
    /// Constructs the flags for an update from its two boolean options.
    pub fn with_options(upsert: bool, multi: bool) -> OpUpdateFlags {
        let mut flags = OpUpdateFlags::empty();

        if upsert {
            flags.insert(Self::UPSERT);
        }

        if multi {
            flags.insert(Self::MULTI_UPDATE);
        }

        flags
    }

    pub fn is_upsert(&self) -> bool {
        self.contains(Self::UPSERT)
    }

    pub fn is_multi(&self) -> bool {
        self.contains(Self::MULTI_UPDATE)
    }
}

impl OpInsertFlags {
    /// Ordered inserts stop at the first error; unordered ones ask the
    /// server to keep going.
    pub fn with_ordered(ordered: bool) -> OpInsertFlags {
        if ordered {
            OpInsertFlags::empty()
        } else {
            OpInsertFlags::CONTINUE_ON_ERROR
        }
    }
}

impl OpDeleteFlags {
    /// Returns the `limit` value a delete command expects for these flags.
    pub fn limit(&self) -> i64 {
        if self.contains(Self::SINGLE_REMOVE) { 1 } else { 0 }
    }
}
