//! Internal macros.

/// Generates id-level getters and setters for the named node links on
/// `BstSet`: `parent_id`/`set_parent`, `left_id`/`set_left`, and so on.
///
/// Getters return `NULL_NODE` for a missing node; setters ignore a missing
/// node, so relinking code can write through `NULL_NODE` children without a
/// guard at every call site.
macro_rules! node_links {
    ($($link:ident),+ $(,)?) => {
        paste::paste! {
            impl<T, C, A: $crate::compact_arena::NodeAllocator<$crate::types::Node<T>>>
                $crate::types::BstSet<T, C, A>
            {
                $(
                    #[inline]
                    pub(crate) fn [<$link _id>](&self, id: $crate::types::NodeId) -> $crate::types::NodeId {
                        self.arena
                            .get(id)
                            .map_or($crate::types::NULL_NODE, |node| node.$link)
                    }

                    #[inline]
                    pub(crate) fn [<set_ $link>](
                        &mut self,
                        id: $crate::types::NodeId,
                        target: $crate::types::NodeId,
                    ) {
                        if let Some(node) = self.arena.get_mut(id) {
                            node.$link = target;
                        }
                    }
                )+
            }
        }
    };
}
