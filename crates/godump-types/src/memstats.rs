/// Number of GC pause duration samples carried by a mem stats record.
pub const PAUSE_SAMPLES: usize = 256;

/// Runtime memory statistics snapshot.
///
/// On the wire this is a rigid sequence of exactly 280 varints: 23
/// scalar fields in the order below, then [`PAUSE_SAMPLES`] pause
/// duration samples, then the final GC cycle count. There are no
/// optional fields and no framing between them — a decoder that reads
/// one varint too few or too many corrupts every record after it.
///
/// ```text
///   Alloc … PauseTotalNs   23 scalars
///   PauseNs                256 samples (circular buffer of recent GCs)
///   NumGC                  1 final field
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemStatsRecord {
    pub alloc: u64,
    pub total_alloc: u64,
    pub sys: u64,
    pub lookups: u64,
    pub mallocs: u64,
    pub frees: u64,
    pub heap_alloc: u64,
    pub heap_sys: u64,
    pub heap_idle: u64,
    pub heap_inuse: u64,
    pub heap_released: u64,
    pub heap_objects: u64,
    pub stack_inuse: u64,
    pub stack_sys: u64,
    pub mspan_inuse: u64,
    pub mspan_sys: u64,
    pub mcache_inuse: u64,
    pub mcache_sys: u64,
    pub buck_hash_sys: u64,
    pub gc_sys: u64,
    pub other_sys: u64,
    pub next_gc: u64,
    pub pause_total_ns: u64,
    /// Recent GC pause durations, most recent first in the runtime's
    /// circular buffer order. Boxed: 2 KiB inline would dominate the
    /// size of every `Record`.
    pub pause_ns: Box<[u64; PAUSE_SAMPLES]>,
    pub num_gc: u64,
}

impl MemStatsRecord {
    /// The 23 scalar fields in wire order, paired with their canonical
    /// runtime names. The renderer iterates this instead of spelling
    /// the sequence out a second time.
    pub fn scalars(&self) -> [(&'static str, u64); 23] {
        [
            ("Alloc", self.alloc),
            ("TotalAlloc", self.total_alloc),
            ("Sys", self.sys),
            ("Lookups", self.lookups),
            ("Mallocs", self.mallocs),
            ("Frees", self.frees),
            ("HeapAlloc", self.heap_alloc),
            ("HeapSys", self.heap_sys),
            ("HeapIdle", self.heap_idle),
            ("HeapInuse", self.heap_inuse),
            ("HeapReleased", self.heap_released),
            ("HeapObjects", self.heap_objects),
            ("StackInuse", self.stack_inuse),
            ("StackSys", self.stack_sys),
            ("MSpanInuse", self.mspan_inuse),
            ("MSpanSys", self.mspan_sys),
            ("MCacheInuse", self.mcache_inuse),
            ("MCacheSys", self.mcache_sys),
            ("BuckHashSys", self.buck_hash_sys),
            ("GCSys", self.gc_sys),
            ("OtherSys", self.other_sys),
            ("NextGC", self.next_gc),
            ("PauseTotalNs", self.pause_total_ns),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_listing_is_in_wire_order() {
        let mut record = MemStatsRecord {
            alloc: 0,
            total_alloc: 0,
            sys: 0,
            lookups: 0,
            mallocs: 0,
            frees: 0,
            heap_alloc: 0,
            heap_sys: 0,
            heap_idle: 0,
            heap_inuse: 0,
            heap_released: 0,
            heap_objects: 0,
            stack_inuse: 0,
            stack_sys: 0,
            mspan_inuse: 0,
            mspan_sys: 0,
            mcache_inuse: 0,
            mcache_sys: 0,
            buck_hash_sys: 0,
            gc_sys: 0,
            other_sys: 0,
            next_gc: 0,
            pause_total_ns: 0,
            pause_ns: Box::new([0; PAUSE_SAMPLES]),
            num_gc: 0,
        };
        record.alloc = 1;
        record.pause_total_ns = 23;

        let scalars = record.scalars();
        assert_eq!(scalars.len(), 23);
        assert_eq!(scalars[0], ("Alloc", 1));
        assert_eq!(scalars[22], ("PauseTotalNs", 23));
    }
}
