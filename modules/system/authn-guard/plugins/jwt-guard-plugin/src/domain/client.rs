//! `Guard` contract implementation for the JWT guard.
//!
//! Delegates to the inherent methods of [`JwtGuard`].

use authn_guard_sdk::{Guard, GuardError, Identity};

use super::guard::JwtGuard;

impl<I> Guard for JwtGuard<'_, I> {
    type Identity = I;

    fn check(&mut self) -> Result<&I, GuardError> {
        JwtGuard::check(self)
    }

    fn user(&self) -> Option<&I> {
        JwtGuard::user(self)
    }

    fn auth(&mut self, identity: &dyn Identity) -> Result<(), GuardError> {
        JwtGuard::auth(self, identity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use authn_guard_sdk::{Identifier, IdentityResolver};

    use super::*;
    use crate::domain::StaticTokenSource;

    #[derive(Debug)]
    struct Member(i64);

    impl Identity for Member {
        fn identifier(&self) -> Identifier {
            Identifier::from(self.0)
        }
    }

    struct Members;

    impl IdentityResolver for Members {
        type Identity = Member;

        fn find_user_by_id(&self, id: &Identifier) -> anyhow::Result<Member> {
            Ok(Member(id.to_int64()))
        }
    }

    fn authenticate<G: Guard>(guard: &mut G) -> Result<&G::Identity, GuardError> {
        guard.check()
    }

    #[test]
    fn guard_trait_round_trip() {
        let issuing_source = StaticTokenSource::default();
        let mut issuer = JwtGuard::new(&issuing_source, &Members, "secret");
        Guard::auth(&mut issuer, &Member(5)).unwrap();
        let token = issuer.token().cloned().unwrap();

        let source = StaticTokenSource::new(token.access_token);
        let mut guard = JwtGuard::new(&source, &Members, "secret");
        assert!(Guard::user(&guard).is_none());

        let member = authenticate(&mut guard).unwrap();
        assert_eq!(member.0, 5);
        assert_eq!(Guard::user(&guard).map(|m| m.0), Some(5));
    }

    #[test]
    fn guard_trait_surfaces_invalid_token() {
        let source = StaticTokenSource::new("not-a-jwt");
        let mut guard = JwtGuard::new(&source, &Members, "secret");

        let err = authenticate(&mut guard).unwrap_err();
        assert!(err.is_invalid_token());
    }
}
